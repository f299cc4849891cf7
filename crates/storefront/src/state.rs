//! Application state composed at start-up.
//!
//! The entry point builds one [`AppState`] from configuration and owns it
//! for the whole session. There is no global store; tests build their own
//! state around a [`MemoryStore`].

use stylehub_core::{
    Email, NewCartItem, NewOrder, Order, OrderId, ProductId, ShippingAddress,
};

use crate::cart::CartState;
use crate::catalog::{CatalogGateway, MockCatalog};
use crate::config::{StorageBackend, StorefrontConfig, check_storage_keys};
use crate::error::Result;
use crate::orders::{MockOrders, OrderError, OrderGateway};
use crate::reviews::{MockReviews, ReviewGateway};
use crate::storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
use crate::wishlist::WishlistState;

/// The storage backend selected by configuration.
#[derive(Debug, Clone)]
pub enum AppStore {
    File(FileStore),
    Memory(MemoryStore),
}

impl AppStore {
    /// Build the backend named in `config`.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        match config.storage {
            StorageBackend::File => Self::File(FileStore::new(&config.data_dir)),
            StorageBackend::Memory => Self::Memory(MemoryStore::new()),
        }
    }
}

impl KeyValueStore for AppStore {
    fn read(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        match self {
            Self::File(store) => store.read(key),
            Self::Memory(store) => store.read(key),
        }
    }

    fn write(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        match self {
            Self::File(store) => store.write(key, value),
            Self::Memory(store) => store.write(key, value),
        }
    }
}

/// Cart, wishlist, and gateways for one storefront session.
#[derive(Debug)]
pub struct AppState<S = AppStore, C = MockCatalog, O = MockOrders, R = MockReviews> {
    cart: CartState<S>,
    wishlist: WishlistState<S>,
    catalog: Option<C>,
    orders: O,
    reviews: R,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// Hydrates the cart and wishlist from the configured backend, loads
    /// the mock catalog if a catalog path is set, and seeds the order book
    /// and review store from their fixture paths. Without a path they start
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage keys collide or a fixture file cannot
    /// be loaded.
    pub async fn from_config(config: &StorefrontConfig) -> Result<Self> {
        let store = AppStore::from_config(config);
        let mut state = Self::new(store, &config.cart_key, &config.wishlist_key)?;
        if let Some(path) = &config.catalog_path {
            state = state.with_catalog(MockCatalog::from_path(path).await?);
        }
        if let Some(path) = &config.orders_path {
            state = state.with_orders(MockOrders::from_path(path).await?);
        }
        if let Some(path) = &config.reviews_path {
            state = state.with_reviews(MockReviews::from_path(path).await?);
        }
        tracing::info!(
            storage = ?config.storage,
            cart_lines = state.cart.items().len(),
            wishlist_entries = state.wishlist.count(),
            "Storefront state ready"
        );
        Ok(state)
    }
}

impl<S, C, O, R> AppState<S, C, O, R>
where
    S: KeyValueStore + Clone,
    C: CatalogGateway,
    O: OrderGateway + Default,
    R: ReviewGateway + Default,
{
    /// Compose state around an explicit backend, with no catalog and empty
    /// order and review stores.
    ///
    /// # Errors
    ///
    /// Returns [`crate::config::ConfigError::SharedStorageKey`] if the cart
    /// and wishlist keys are equal.
    pub fn new(store: S, cart_key: &str, wishlist_key: &str) -> Result<Self> {
        check_storage_keys(cart_key, wishlist_key)?;
        Ok(Self {
            cart: CartState::load(store.clone(), cart_key),
            wishlist: WishlistState::load(store, wishlist_key),
            catalog: None,
            orders: O::default(),
            reviews: R::default(),
        })
    }
}

impl<S, C, O, R> AppState<S, C, O, R>
where
    S: KeyValueStore + Clone,
    C: CatalogGateway,
    O: OrderGateway,
    R: ReviewGateway,
{
    /// Use `catalog` for product lookups.
    #[must_use]
    pub fn with_catalog(mut self, catalog: C) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use `orders` as the order book.
    #[must_use]
    pub fn with_orders(mut self, orders: O) -> Self {
        self.orders = orders;
        self
    }

    /// Use `reviews` as the review store.
    #[must_use]
    pub fn with_reviews(mut self, reviews: R) -> Self {
        self.reviews = reviews;
        self
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &CartState<S> {
        &self.cart
    }

    /// The cart, for mutation.
    pub const fn cart_mut(&mut self) -> &mut CartState<S> {
        &mut self.cart
    }

    /// The wishlist.
    #[must_use]
    pub const fn wishlist(&self) -> &WishlistState<S> {
        &self.wishlist
    }

    /// The wishlist, for mutation.
    pub const fn wishlist_mut(&mut self) -> &mut WishlistState<S> {
        &mut self.wishlist
    }

    /// The catalog, if one is configured.
    #[must_use]
    pub const fn catalog(&self) -> Option<&C> {
        self.catalog.as_ref()
    }

    /// The order book.
    #[must_use]
    pub const fn orders(&self) -> &O {
        &self.orders
    }

    /// The review store.
    #[must_use]
    pub const fn reviews(&self) -> &R {
        &self.reviews
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Name, price, and thumbnail come from the catalog; `size` and `color`
    /// pick the variant line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::catalog::CatalogError::NotFound`] for unknown ids.
    /// Without a catalog this is a no-op returning `Ok(false)`.
    pub async fn add_product_to_cart(
        &mut self,
        id: &ProductId,
        size: Option<String>,
        color: Option<String>,
    ) -> Result<bool> {
        let Some(catalog) = &self.catalog else {
            return Ok(false);
        };
        let product = catalog.product(id).await?;

        let mut item = NewCartItem::new(product.id.clone(), product.name.clone(), product.price);
        item.size = size;
        item.color = color;
        item.image = product.primary_image().map(str::to_string);
        self.cart.add_item(item);
        Ok(true)
    }

    /// Save a product to the wishlist.
    ///
    /// With a catalog, the full product is snapshotted. Without one, a bare
    /// `{ "Id": ... }` record is saved.
    ///
    /// # Errors
    ///
    /// Returns [`crate::catalog::CatalogError::NotFound`] if a catalog is
    /// configured and does not know the id.
    pub async fn save_product_to_wishlist(&mut self, id: &ProductId) -> Result<bool> {
        let added = match &self.catalog {
            Some(catalog) => {
                let product = catalog.product(id).await?;
                self.wishlist.add(&product)?
            }
            None => self
                .wishlist
                .add(&serde_json::json!({ "Id": id.as_str() }))?,
        };
        Ok(added)
    }

    /// Move a wishlist product into the cart as the given variant.
    ///
    /// # Errors
    ///
    /// Same as [`AppState::add_product_to_cart`].
    pub async fn move_wishlist_to_cart(
        &mut self,
        id: &ProductId,
        size: Option<String>,
        color: Option<String>,
    ) -> Result<bool> {
        if !self.wishlist.contains(id) {
            return Ok(false);
        }
        let added = self.add_product_to_cart(id, size, color).await?;
        if added {
            self.wishlist.remove(id);
        }
        Ok(added)
    }

    /// Place an order for everything in the cart, then empty the cart.
    ///
    /// Totals come from [`CartState::checkout_summary`]. The cart is left
    /// untouched if placement fails.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] for an empty cart, an invalid-input
    /// error for an incomplete address, or the gateway's error.
    pub async fn place_order(
        &mut self,
        user_email: Email,
        shipping_address: ShippingAddress,
        payment_method: impl Into<String>,
    ) -> Result<Order> {
        if self.cart.is_empty() {
            return Err(OrderError::EmptyCart.into());
        }
        shipping_address.validate()?;

        let order = NewOrder {
            user_email,
            items: self.cart.items().to_vec(),
            totals: self.cart.checkout_summary(),
            shipping_address,
            payment_method: payment_method.into(),
        };
        let placed = self.orders.place(order).await?;
        self.cart.clear();
        Ok(placed)
    }

    /// An order, only if it was placed by `email`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for unknown ids and for orders
    /// placed by someone else.
    pub async fn order_for(&self, email: &Email, id: OrderId) -> Result<Order> {
        let order = self.orders.order(id).await?;
        if &order.user_email != email {
            tracing::debug!(order_id = %id, "Order belongs to another customer");
            return Err(OrderError::NotFound(id).into());
        }
        Ok(order)
    }

    /// Products `email` has bought but not yet reviewed, in the order first
    /// purchased.
    ///
    /// # Errors
    ///
    /// Returns the order or review gateway's error.
    pub async fn unreviewed_purchases(&self, email: &Email) -> Result<Vec<ProductId>> {
        let reviewed: Vec<ProductId> = self
            .reviews
            .by_user(email)
            .await?
            .into_iter()
            .map(|review| review.product_id)
            .collect();

        let mut orders = self.orders.user_orders(email).await?;
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let mut pending: Vec<ProductId> = Vec::new();
        for item in orders.into_iter().flat_map(|order| order.items) {
            if !reviewed.contains(&item.product_id) && !pending.contains(&item.product_id) {
                pending.push(item.product_id);
            }
        }
        Ok(pending)
    }
}
