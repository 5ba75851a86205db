use crate::{
    abstract_trait::{
        DynCartRepository, DynCartService, DynFavoriteRepository, DynFavoriteService,
        DynOrderRepository, DynOrderService, DynProductRepository, DynProductService,
    },
    repository::{CartRepository, FavoriteRepository, OrderRepository, ProductRepository},
    service::{CartService, FavoriteService, OrderService, ProductService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

/// Store-facing implementations behind every service.
#[derive(Clone)]
pub struct Repositories {
    pub product: DynProductRepository,
    pub cart: DynCartRepository,
    pub favorite: DynFavoriteRepository,
    pub order: DynOrderRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            product: Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository,
            cart: Arc::new(CartRepository::new(pool.clone())) as DynCartRepository,
            favorite: Arc::new(FavoriteRepository::new(pool.clone())) as DynFavoriteRepository,
            order: Arc::new(OrderRepository::new(pool)) as DynOrderRepository,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: DynProductService,
    pub cart_service: DynCartService,
    pub favorite_service: DynFavoriteService,
    pub order_service: DynOrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &"ProductService")
            .field("cart_service", &"CartService")
            .field("favorite_service", &"FavoriteService")
            .field("order_service", &"OrderService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(repositories: Repositories, registry: &mut Registry) -> Self {
        let Repositories {
            product,
            cart,
            favorite,
            order,
        } = repositories;

        let product_service =
            Arc::new(ProductService::new(product, registry)) as DynProductService;
        let cart_service = Arc::new(CartService::new(cart, registry)) as DynCartService;
        let favorite_service =
            Arc::new(FavoriteService::new(favorite, registry)) as DynFavoriteService;
        let order_service = Arc::new(OrderService::new(order, registry)) as DynOrderService;

        Self {
            product_service,
            cart_service,
            favorite_service,
            order_service,
        }
    }
}
