mod cart;
mod favorite;
mod order;
mod product;

pub use self::cart::{CartItem, CartLine};
pub use self::favorite::{Favorite, FavoriteLine};
pub use self::order::{Order, OrderProduct, OrderProductLine, OrderTotal};
pub use self::product::Product;
