#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use chrono::Utc;
use serde_json::Value;
use shared::errors::RepositoryError;
use std::sync::{Arc, Mutex};
use storefront::{
    abstract_trait::{
        CartRepositoryTrait, FavoriteRepositoryTrait, OrderRepositoryTrait,
        ProductRepositoryTrait,
    },
    di::Repositories,
    domain::requests::{
        AddFavoriteRequest, AddToCartRequest, CreateProductRequest, RemoveCartItemRequest,
        UpdateCartItemRequest, UpdateProductRequest,
    },
    handler::AppRouter,
    model::{
        CartItem, CartLine, Favorite, FavoriteLine, Order, OrderProduct, OrderProductLine,
        OrderTotal, Product,
    },
    state::AppState,
};
use tower::ServiceExt;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    cart: Vec<CartItem>,
    favorites: Vec<Favorite>,
    orders: Vec<Order>,
    order_products: Vec<OrderProduct>,
    next_id: i32,
    calls: usize,
    fail: bool,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    /// Counts the statement and fails it when a failure was armed.
    fn statement(&mut self) -> Result<(), RepositoryError> {
        self.calls += 1;
        if self.fail {
            return Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn product(&self, product_id: i32) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }
}

/// Keeps every table in memory and honours the same uniqueness rules as the
/// Postgres schema.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn repositories(&self) -> Repositories {
        Repositories {
            product: Arc::new(self.clone()),
            cart: Arc::new(self.clone()),
            favorite: Arc::new(self.clone()),
            order: Arc::new(self.clone()),
        }
    }

    pub fn app(&self) -> Router {
        AppRouter::build(AppState::with_repositories(self.repositories()))
    }

    pub fn calls(&self) -> usize {
        self.tables.lock().unwrap().calls
    }

    pub fn fail_statements(&self) {
        self.tables.lock().unwrap().fail = true;
    }

    pub fn cart_rows(&self) -> Vec<CartItem> {
        self.tables.lock().unwrap().cart.clone()
    }

    pub fn favorite_rows(&self) -> Vec<Favorite> {
        self.tables.lock().unwrap().favorites.clone()
    }

    pub fn seed_product(&self, name: &str, price: f64) -> i32 {
        let mut tables = self.tables.lock().unwrap();
        let product_id = tables.next_id();
        tables.products.push(Product {
            product_id,
            name: name.to_string(),
            description: Some(format!("{name} description")),
            price,
            stock: 10,
            image_url: None,
            created_at: Some(Utc::now().naive_utc()),
        });
        product_id
    }

    pub fn seed_order(&self, user_id: Uuid, total: f64) -> Uuid {
        let mut tables = self.tables.lock().unwrap();
        let order_id = Uuid::new_v4();
        tables.orders.push(Order {
            order_id,
            user_id,
            total,
            status: "Pending".to_string(),
            created_at: Some(Utc::now().naive_utc()),
        });
        order_id
    }
}

#[async_trait]
impl ProductRepositoryTrait for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        Ok(tables.products.clone())
    }

    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        let product = Product {
            product_id: tables.next_id(),
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock: req.stock,
            image_url: req.image_url.clone(),
            created_at: Some(Utc::now().naive_utc()),
        };
        tables.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        Ok(tables
            .products
            .iter_mut()
            .find(|p| p.product_id == id)
            .map(|p| {
                p.name = req.name.clone();
                p.description = req.description.clone();
                p.price = req.price;
                p.stock = req.stock;
                p.image_url = req.image_url.clone();
                p.clone()
            }))
    }

    async fn delete_product(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        let before = tables.products.len();
        tables.products.retain(|p| p.product_id != id);
        Ok((before - tables.products.len()) as u64)
    }
}

#[async_trait]
impl CartRepositoryTrait for InMemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<CartLine>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        Ok(tables
            .cart
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter_map(|c| {
                tables.product(c.product_id).map(|p| CartLine {
                    cart_id: c.cart_id,
                    product_id: p.product_id,
                    name: p.name.clone(),
                    description: p.description.clone(),
                    price: p.price,
                    quantity: c.quantity,
                    image_url: p.image_url.clone(),
                    added_at: c.added_at,
                })
            })
            .collect())
    }

    async fn upsert_item(&self, req: &AddToCartRequest) -> Result<CartItem, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        if let Some(existing) = tables
            .cart
            .iter_mut()
            .find(|c| c.user_id == req.user_id && c.product_id == req.product_id)
        {
            existing.quantity += req.quantity;
            return Ok(existing.clone());
        }
        let item = CartItem {
            cart_id: tables.next_id(),
            user_id: req.user_id,
            product_id: req.product_id,
            quantity: req.quantity,
            added_at: Some(Utc::now().naive_utc()),
        };
        tables.cart.push(item.clone());
        Ok(item)
    }

    async fn update_quantity(
        &self,
        req: &UpdateCartItemRequest,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        Ok(tables
            .cart
            .iter_mut()
            .find(|c| c.user_id == req.user_id && c.product_id == req.product_id)
            .map(|c| {
                c.quantity = req.quantity;
                c.clone()
            }))
    }

    async fn remove_item(&self, req: &RemoveCartItemRequest) -> Result<u64, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        let before = tables.cart.len();
        tables
            .cart
            .retain(|c| !(c.user_id == req.user_id && c.product_id == req.product_id));
        Ok((before - tables.cart.len()) as u64)
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        let before = tables.cart.len();
        tables.cart.retain(|c| c.user_id != user_id);
        Ok((before - tables.cart.len()) as u64)
    }
}

#[async_trait]
impl FavoriteRepositoryTrait for InMemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<FavoriteLine>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        Ok(tables
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| {
                tables.product(f.product_id).map(|p| FavoriteLine {
                    favorite_id: f.favorite_id,
                    product_id: p.product_id,
                    name: p.name.clone(),
                    description: p.description.clone(),
                    price: p.price,
                    image_url: p.image_url.clone(),
                    added_at: f.added_at,
                })
            })
            .collect())
    }

    async fn add_favorite(&self, req: &AddFavoriteRequest) -> Result<Favorite, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        if tables
            .favorites
            .iter()
            .any(|f| f.user_id == req.user_id && f.product_id == req.product_id)
        {
            return Err(RepositoryError::AlreadyExists(
                "Product is already in favorites".to_string(),
            ));
        }
        let favorite = Favorite {
            favorite_id: tables.next_id(),
            user_id: req.user_id,
            product_id: req.product_id,
            added_at: Some(Utc::now().naive_utc()),
        };
        tables.favorites.push(favorite.clone());
        Ok(favorite)
    }
}

#[async_trait]
impl OrderRepositoryTrait for InMemoryStore {
    async fn find_first_by_user(&self, user_id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        Ok(tables.orders.iter().find(|o| o.user_id == user_id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        Ok(tables
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        Ok(tables.orders.iter().find(|o| o.order_id == order_id).cloned())
    }

    async fn find_products(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderProductLine>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        Ok(tables
            .order_products
            .iter()
            .filter(|op| op.order_id == order_id)
            .filter_map(|op| {
                tables.product(op.product_id).map(|p| OrderProductLine {
                    order_id: op.order_id,
                    product_id: p.product_id,
                    name: p.name.clone(),
                    description: p.description.clone(),
                    price: p.price,
                    quantity: op.quantity,
                })
            })
            .collect())
    }

    async fn total_by_user(&self, user_id: Uuid) -> Result<Option<OrderTotal>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        let totals: Vec<f64> = tables
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .map(|o| o.total)
            .collect();
        // SUM over zero rows still yields one row holding NULL.
        let total: Option<f64> = if totals.is_empty() {
            None
        } else {
            Some(totals.iter().sum())
        };
        Ok(Some(OrderTotal { total }))
    }

    async fn add_product(
        &self,
        order_id: Uuid,
        product_id: i32,
        quantity: i32,
    ) -> Result<OrderProduct, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.statement()?;
        let link = OrderProduct {
            order_id,
            product_id,
            quantity,
        };
        tables.order_products.push(link.clone());
        Ok(link)
    }
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
