mod cart;
mod favorite;
mod order;
mod product;

pub use self::cart::CartRepository;
pub use self::favorite::FavoriteRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
