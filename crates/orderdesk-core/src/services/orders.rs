//! Order service - read access to the client and their orders.

use std::sync::Arc;

use crate::domain::{Client, Order};
use crate::ports::{CoreError, OrderRepository};

/// Service for reading client and order data.
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn client(&self) -> Result<Client, CoreError> {
        Ok(self.repo.client().await?)
    }

    pub async fn orders(&self) -> Result<Vec<Order>, CoreError> {
        Ok(self.repo.orders().await?)
    }

    /// Get one order, failing with `NotFound` for unknown ids.
    pub async fn order(&self, id: &str) -> Result<Order, CoreError> {
        self.repo
            .find(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("order {id}")))
    }
}
