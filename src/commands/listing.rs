//! Listing Commands

use rentit_core::domain::{DomainError, ItemRow, ListingDraft, Session};
use rentit_core::service::{self, PublishError};

use super::{backend, now_millis, read_photo};

/// Validate, upload `files` and insert the listing
pub async fn publish_listing(
    draft: &ListingDraft,
    session: Option<&Session>,
    files: &[web_sys::File],
) -> Result<ItemRow, PublishError> {
    // surface form errors before touching the files
    draft.validate(session)?;

    let mut photos = Vec::with_capacity(files.len());
    for file in files {
        let photo = read_photo(file).await.map_err(|message| PublishError::Upload {
            file_name: file.name(),
            source: DomainError::InvalidInput(message),
        })?;
        photos.push(photo);
    }

    let backend = backend();
    service::publish_listing(&*backend, draft, session, photos, now_millis()).await
}
