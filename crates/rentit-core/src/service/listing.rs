//! Publish Listing
//!
//! Validates the draft, uploads the photos and inserts the item row.

use thiserror::Error;

use crate::domain::{check_photo_limit, upload_path, DomainError, DraftError, ItemRow, ListingDraft, Notice, Session};
use crate::repository::{Bucket, ItemRepository, ObjectStorage};

/// A picked file, read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PublishError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error("upload of {file_name} failed: {source}")]
    Upload { file_name: String, source: DomainError },
    #[error("insert failed: {0}")]
    Insert(DomainError),
}

impl PublishError {
    pub fn notice(&self) -> Notice {
        match self {
            PublishError::Draft(e) => e.notice(),
            PublishError::Upload { source, .. } => Notice::error("Ошибка загрузки фото", source.user_message()),
            PublishError::Insert(e) => Notice::error("Ошибка", e.user_message()),
        }
    }

    /// The user has to sign in before trying again
    pub fn needs_sign_in(&self) -> bool {
        matches!(self, PublishError::Draft(DraftError::NotSignedIn))
    }
}

/// Notice shown after a successful publish
pub fn published_notice() -> Notice {
    Notice::info("Объявление создано!").with_description("Ваша вещь появилась в каталоге.")
}

/// Publish `draft` with `photos`.
///
/// Nothing is uploaded until the draft validates. Photos go to the
/// `item-images` bucket under the owner's folder; the first failed upload
/// aborts the publish before the row is inserted.
pub async fn publish_listing<B>(
    backend: &B,
    draft: &ListingDraft,
    session: Option<&Session>,
    photos: Vec<PhotoUpload>,
    now_millis: i64,
) -> Result<ItemRow, PublishError>
where
    B: ItemRepository + ObjectStorage + ?Sized,
{
    let mut new_item = draft.validate(session)?;
    check_photo_limit(0, photos.len())?;

    for (n, photo) in photos.into_iter().enumerate() {
        let path = upload_path(&new_item.owner_id, now_millis + n as i64, &photo.file_name);
        backend
            .upload(Bucket::ItemImages, &path, photo.bytes, &photo.content_type)
            .await
            .map_err(|source| PublishError::Upload {
                file_name: photo.file_name.clone(),
                source,
            })?;
        new_item.images.push(backend.public_url(Bucket::ItemImages, &path));
    }

    let row = backend.insert(&new_item).await.map_err(PublishError::Insert)?;
    log::info!("published listing {} with {} photo(s)", row.id, new_item.images.len());
    Ok(row)
}
