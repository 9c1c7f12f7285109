//! Object storage over the hosted storage API

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;

use super::SupabaseClient;
use crate::domain::DomainResult;
use crate::repository::{Bucket, ObjectStorage};

/// Object keys keep their `/` separators
const OBJECT_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

pub(super) fn encode_object_path(path: &str) -> String {
    utf8_percent_encode(path, OBJECT_PATH).to_string()
}

#[async_trait(?Send)]
impl ObjectStorage for SupabaseClient {
    async fn upload(&self, bucket: Bucket, path: &str, bytes: Vec<u8>, content_type: &str) -> DomainResult<()> {
        let url = self
            .config
            .storage_url(&format!("object/{}/{}", bucket.as_str(), encode_object_path(path)));
        let size = bytes.len();
        let request = self
            .request(Method::POST, &url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes);
        self.send(request).await?;
        log::info!("uploaded {} bytes to {}/{}", size, bucket.as_str(), path);
        Ok(())
    }

    fn public_url(&self, bucket: Bucket, path: &str) -> String {
        self.config
            .storage_url(&format!("object/public/{}/{}", bucket.as_str(), encode_object_path(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    #[test]
    fn test_public_url_encodes_file_name() {
        let client = SupabaseClient::new(&BackendConfig::new("https://p.supabase.co", "anon")).unwrap();
        assert_eq!(
            client.public_url(Bucket::ItemImages, "u1/17-фото 1.jpg"),
            "https://p.supabase.co/storage/v1/object/public/item-images/u1/17-%D1%84%D0%BE%D1%82%D0%BE%201.jpg"
        );
    }
}
