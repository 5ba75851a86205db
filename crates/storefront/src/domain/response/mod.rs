mod api;
mod cart;
mod favorite;
mod order;
mod product;

pub use self::api::MessageResponse;
pub use self::cart::{CartItemResponse, CartLineResponse};
pub use self::favorite::FavoriteLineResponse;
pub use self::order::{
    OrderProductLineResponse, OrderProductResponse, OrderResponse, OrderTotalResponse,
};
pub use self::product::ProductResponse;
