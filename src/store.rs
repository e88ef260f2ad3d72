//! Document store adapter: collection handles and one method per store
//! operation. Query construction stays here so handlers never touch the
//! driver directly.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{ContactMessage, ImportRequest, Listing, StatusCheck};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};

/// Cap on unfiltered status listings.
const STATUS_LIST_LIMIT: i64 = 1000;

#[derive(Clone)]
pub struct Store {
    client: Client,
    db: Database,
}

impl Store {
    /// Build a store handle from config. The driver connects lazily; server
    /// selection happens on the first operation.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::with_uri_str(&config.mongo_url).await?;
        let db = client.database(&config.db_name);
        tracing::info!(database = %config.db_name, "document store client ready");
        Ok(Self { client, db })
    }

    /// The underlying client, for the single shutdown at process exit.
    pub fn client(&self) -> &Client {
        &self.client
    }

    fn status_checks(&self) -> Collection<StatusCheck> {
        self.db.collection("status_checks")
    }

    fn listings(&self) -> Collection<Listing> {
        self.db.collection("listings")
    }

    fn contact_messages(&self) -> Collection<ContactMessage> {
        self.db.collection("contact_messages")
    }

    fn import_requests(&self) -> Collection<ImportRequest> {
        self.db.collection("import_requests")
    }

    pub async fn insert_status(&self, record: &StatusCheck) -> Result<(), AppError> {
        self.status_checks().insert_one(record).await?;
        Ok(())
    }

    /// Up to 1000 records in the store's natural (insertion) order.
    pub async fn list_status(&self) -> Result<Vec<StatusCheck>, AppError> {
        let cursor = self
            .status_checks()
            .find(doc! {})
            .limit(STATUS_LIST_LIMIT)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn insert_listing(&self, listing: &Listing) -> Result<(), AppError> {
        self.listings().insert_one(listing).await?;
        Ok(())
    }

    /// Newest-first listings, optionally filtered by a search term. The caller
    /// has already bounds-checked `limit`.
    pub async fn search_listings(
        &self,
        q: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Listing>, AppError> {
        let filter = match q {
            Some(q) if !q.is_empty() => search_filter(q),
            _ => Document::new(),
        };
        let cursor = self
            .listings()
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_listing(&self, id: &str) -> Result<Option<Listing>, AppError> {
        Ok(self.listings().find_one(doc! { "id": id }).await?)
    }

    pub async fn insert_contact_message(&self, message: &ContactMessage) -> Result<(), AppError> {
        self.contact_messages().insert_one(message).await?;
        Ok(())
    }

    pub async fn insert_import_request(&self, request: &ImportRequest) -> Result<(), AppError> {
        self.import_requests().insert_one(request).await?;
        Ok(())
    }
}

/// Case-insensitive substring match over brand, model, and city. The query
/// text is escaped so it matches literally, not as a pattern.
fn search_filter(q: &str) -> Document {
    let pattern = regex::escape(q);
    doc! {
        "$or": [
            { "brand": { "$regex": pattern.clone(), "$options": "i" } },
            { "model": { "$regex": pattern.clone(), "$options": "i" } },
            { "city": { "$regex": pattern, "$options": "i" } },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_filter_covers_brand_model_city() {
        let filter = search_filter("toyota");
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);
        let brand = clauses[0].as_document().unwrap().get_document("brand").unwrap();
        assert_eq!(brand.get_str("$regex").unwrap(), "toyota");
        assert_eq!(brand.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn search_filter_escapes_pattern_metacharacters() {
        let filter = search_filter("1.8L");
        let brand = filter.get_array("$or").unwrap()[0]
            .as_document()
            .unwrap()
            .get_document("brand")
            .unwrap();
        assert_eq!(brand.get_str("$regex").unwrap(), r"1\.8L");
    }
}
