//! Order repository trait definition and the built-in fixture implementation.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Client, Order, fixture_client, fixture_orders};

/// Read access to the signed-in client and their orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// The client owning the session.
    async fn client(&self) -> Result<Client, RepositoryError>;

    /// All orders, in display order.
    async fn orders(&self) -> Result<Vec<Order>, RepositoryError>;

    /// Find one order by id.
    async fn find(&self, id: &str) -> Result<Option<Order>, RepositoryError> {
        Ok(self.orders().await?.into_iter().find(|order| order.id == id))
    }
}

/// Repository serving the hard-coded fixture data set.
#[derive(Debug, Clone)]
pub struct FixtureOrderRepository {
    client: Client,
    orders: Vec<Order>,
}

impl FixtureOrderRepository {
    pub fn new() -> Self {
        Self {
            client: fixture_client(),
            orders: fixture_orders(),
        }
    }
}

impl Default for FixtureOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for FixtureOrderRepository {
    async fn client(&self) -> Result<Client, RepositoryError> {
        Ok(self.client.clone())
    }

    async fn orders(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.clone())
    }
}
