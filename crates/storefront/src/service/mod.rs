mod cart;
mod favorite;
mod order;
mod product;

pub use self::cart::CartService;
pub use self::favorite::FavoriteService;
pub use self::order::OrderService;
pub use self::product::ProductService;
