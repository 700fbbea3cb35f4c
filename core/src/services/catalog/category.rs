//! Category management

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::category::{Category, CATEGORY_NAME_MAX_LEN};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CategoryRepository;

use super::check_text;

pub struct CategoryService<C: CategoryRepository + ?Sized> {
    categories: Arc<C>,
}

impl<C: CategoryRepository + ?Sized> CategoryService<C> {
    pub fn new(categories: Arc<C>) -> Self {
        Self { categories }
    }

    pub async fn list(&self) -> DomainResult<Vec<Category>> {
        self.categories.list().await
    }

    /// Create a category; names are unique ignoring case
    pub async fn create(&self, name: &str) -> DomainResult<Category> {
        check_text("name", name, CATEGORY_NAME_MAX_LEN)?;

        if self.categories.find_by_name(name).await?.is_some() {
            return Err(DomainError::Conflict {
                message: format!("Category '{}' already exists", name.trim()),
            });
        }

        let category = self.categories.create(Category::new(name)).await?;
        tracing::info!(category_id = %category.id, name = %category.name, event = "category_created", "Category created");
        Ok(category)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.categories.delete(id).await? {
            return Err(DomainError::not_found("Category"));
        }
        Ok(())
    }
}
