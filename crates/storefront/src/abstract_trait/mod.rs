mod cart;
mod favorite;
mod order;
mod product;

pub use self::cart::{CartRepositoryTrait, CartServiceTrait, DynCartRepository, DynCartService};
pub use self::favorite::{
    DynFavoriteRepository, DynFavoriteService, FavoriteRepositoryTrait, FavoriteServiceTrait,
};
pub use self::order::{DynOrderRepository, DynOrderService, OrderRepositoryTrait, OrderServiceTrait};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
