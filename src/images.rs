//! Product image retrieval for the presentation layer.
//!
//! Failures never propagate: any URL that cannot be fetched resolves to a
//! grey placeholder of the display size.

use async_trait::async_trait;
use log::debug;

pub const PLACEHOLDER_SIZE: (u32, u32) = (350, 350);
pub const PLACEHOLDER_RGB: (u8, u8, u8) = (200, 200, 200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductImage {
    Fetched {
        bytes: Vec<u8>,
        content_type: Option<String>,
    },
    Placeholder {
        width: u32,
        height: u32,
        rgb: (u8, u8, u8),
    },
}

impl ProductImage {
    pub fn placeholder() -> Self {
        ProductImage::Placeholder {
            width: PLACEHOLDER_SIZE.0,
            height: PLACEHOLDER_SIZE.1,
            rgb: PLACEHOLDER_RGB,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ProductImage::Placeholder { .. })
    }

    /// Caption shown under the image.
    pub fn caption(&self) -> String {
        match self {
            ProductImage::Fetched {
                bytes,
                content_type,
            } => format!(
                "Product image ({} KB, {})",
                bytes.len().div_ceil(1024),
                content_type.as_deref().unwrap_or("unknown type")
            ),
            ProductImage::Placeholder { width, height, .. } => {
                format!("No image ({}x{} placeholder)", width, height)
            }
        }
    }
}

#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn fetch(&self, url: &str) -> ProductImage;
}

pub struct HttpImageProvider {
    http: reqwest::Client,
}

impl HttpImageProvider {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpImageProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProvider for HttpImageProvider {
    async fn fetch(&self, url: &str) -> ProductImage {
        if url.trim().is_empty() {
            return ProductImage::placeholder();
        }

        let response = match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!("Image {} returned HTTP {}", url, response.status().as_u16());
                return ProductImage::placeholder();
            }
            Err(e) => {
                debug!("Image {} failed: {}", url, e);
                return ProductImage::placeholder();
            }
        };

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        match response.bytes().await {
            Ok(bytes) if !bytes.is_empty() => ProductImage::Fetched {
                bytes: bytes.to_vec(),
                content_type,
            },
            _ => ProductImage::placeholder(),
        }
    }
}
