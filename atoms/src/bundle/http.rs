use lambda_http::{http::StatusCode, Body, Error as LambdaError, Response};

use super::service::{zip_and_publish, BundleSettings};
use crate::archive::ImageResolver;
use crate::publish::ArchiveStore;

/// HTTP Handler: POST zip request
///
/// 200 with the public URL on success, otherwise the fixed message for the
/// failure kind. Causes only go to the log.
pub async fn zip_images_handler<R, S>(
    settings: &BundleSettings,
    resolver: &R,
    store: &S,
    body: &[u8],
) -> Result<Response<Body>, LambdaError>
where
    R: ImageResolver + Sync,
    S: ArchiveStore + Sync,
{
    match zip_and_publish(settings, resolver, store, body).await {
        Ok(artifact) => {
            tracing::info!("✅ zip_images_handler success: key={}", artifact.key);
            text_response(StatusCode::OK, artifact.url)
        }
        Err(e) => {
            tracing::error!(
                "❌ zip_images_handler failed: mode={}, status={}, error={}",
                settings.mode.as_str(),
                e.status_code(),
                e
            );
            text_response(e.status_code(), e.public_message().to_string())
        }
    }
}

/// CORS preflight answer for browsers calling through the gateway.
pub fn preflight_response() -> Result<Response<Body>, LambdaError> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST,OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Empty)
        .map_err(Box::new)?)
}

fn text_response(status: StatusCode, body: String) -> Result<Response<Body>, LambdaError> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Access-Control-Allow-Origin", "*")
        .body(body.into())
        .map_err(Box::new)?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::{Cursor, Read};
    use std::sync::Mutex;

    use super::*;
    use crate::publish::PublishTarget;
    use crate::request::SourceMode;

    struct FakeWeb {
        pages: HashMap<String, Vec<u8>>,
    }

    impl FakeWeb {
        fn new(pages: &[(&str, &[u8])]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, bytes)| (url.to_string(), bytes.to_vec()))
                    .collect(),
            }
        }
    }

    impl ImageResolver for FakeWeb {
        async fn resolve(&self, _index: usize, source: &str) -> Result<Vec<u8>, String> {
            self.pages
                .get(source)
                .cloned()
                .ok_or_else(|| format!("GET {} failed: connection refused", source))
        }
    }

    #[derive(Default)]
    struct FakeBucket {
        objects: Mutex<Vec<(String, Vec<u8>)>>,
        reject: bool,
    }

    impl FakeBucket {
        fn objects(&self) -> Vec<(String, Vec<u8>)> {
            self.objects.lock().expect("poisoned mutex").clone()
        }
    }

    impl ArchiveStore for FakeBucket {
        async fn put_archive(&self, key: &str, body: Vec<u8>) -> Result<(), String> {
            if self.reject {
                return Err("service error: AccessDenied".to_string());
            }
            self.objects
                .lock()
                .expect("poisoned mutex")
                .push((key.to_string(), body));
            Ok(())
        }
    }

    fn settings(mode: SourceMode) -> BundleSettings {
        BundleSettings {
            mode,
            target: PublishTarget::new("zips", "ap-southeast-2"),
            fetch_concurrency: 1,
        }
    }

    fn body_text(resp: &Response<Body>) -> String {
        match resp.body() {
            Body::Text(text) => text.clone(),
            Body::Binary(bytes) => String::from_utf8_lossy(bytes).to_string(),
            Body::Empty => String::new(),
        }
    }

    fn unzip(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
        let mut zip = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).expect("valid zip");
        (0..zip.len())
            .map(|i| {
                let mut file = zip.by_index(i).expect("entry");
                let mut data = Vec::new();
                file.read_to_end(&mut data).expect("read entry");
                (file.name().to_string(), data)
            })
            .collect()
    }

    #[test]
    fn preflight_allows_post() {
        let resp = preflight_response().expect("response");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Methods").unwrap(),
            "POST,OPTIONS"
        );
        assert_eq!(body_text(&resp), "");
    }

    #[tokio::test]
    async fn url_mode_round_trips_fetched_bytes() {
        let web = FakeWeb::new(&[
            ("https://cdn.example/cat.jpg", &b"meow"[..]),
            ("https://cdn.example/dog.png", &b"woof"[..]),
        ]);
        let bucket = FakeBucket::default();
        let body = br#"{"imageUrls": ["https://cdn.example/cat.jpg", "https://cdn.example/dog.png"]}"#;

        let resp = zip_images_handler(&settings(SourceMode::Url), &web, &bucket, body)
            .await
            .expect("response");

        assert_eq!(resp.status(), StatusCode::OK);
        let objects = bucket.objects();
        assert_eq!(objects.len(), 1);
        let (key, archive) = &objects[0];
        assert_eq!(
            body_text(&resp),
            format!("https://zips.s3.ap-southeast-2.amazonaws.com/{}", key)
        );
        assert_eq!(
            unzip(archive),
            vec![
                ("image_0.jpg".to_string(), b"meow".to_vec()),
                ("image_1.jpg".to_string(), b"woof".to_vec()),
            ]
        );
    }

    #[tokio::test]
    async fn inline_mode_round_trips_raw_strings() {
        let resolver = crate::archive::InlineResolver::default();
        let bucket = FakeBucket::default();
        let body = br#"{"images": ["first", "second", "third"]}"#;

        let resp = zip_images_handler(&settings(SourceMode::Inline), &resolver, &bucket, body)
            .await
            .expect("response");

        assert_eq!(resp.status(), StatusCode::OK);
        let objects = bucket.objects();
        assert_eq!(
            unzip(&objects[0].1),
            vec![
                ("image_0.jpg".to_string(), b"first".to_vec()),
                ("image_1.jpg".to_string(), b"second".to_vec()),
                ("image_2.jpg".to_string(), b"third".to_vec()),
            ]
        );
    }

    #[tokio::test]
    async fn empty_list_uploads_empty_archive() {
        let bucket = FakeBucket::default();
        let resp = zip_images_handler(
            &settings(SourceMode::Url),
            &FakeWeb::new(&[]),
            &bucket,
            br#"{"imageUrls": []}"#,
        )
        .await
        .expect("response");

        assert_eq!(resp.status(), StatusCode::OK);
        let objects = bucket.objects();
        assert_eq!(objects.len(), 1);
        assert!(unzip(&objects[0].1).is_empty());
    }

    #[tokio::test]
    async fn invalid_body_is_400_and_never_touches_storage() {
        let bucket = FakeBucket::default();
        for body in [&b"{not json"[..], br#"{"urls": []}"#, b""] {
            let resp = zip_images_handler(
                &settings(SourceMode::Url),
                &FakeWeb::new(&[]),
                &bucket,
                body,
            )
            .await
            .expect("response");

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_text(&resp), "Invalid request body");
        }
        assert!(bucket.objects().is_empty());
    }

    #[tokio::test]
    async fn unreachable_source_is_500_and_nothing_uploaded() {
        let web = FakeWeb::new(&[("https://cdn.example/ok.jpg", &b"ok"[..])]);
        let bucket = FakeBucket::default();
        let body = br#"{"imageUrls": ["https://cdn.example/ok.jpg", "https://down.example/x.jpg"]}"#;

        let resp = zip_images_handler(&settings(SourceMode::Url), &web, &bucket, body)
            .await
            .expect("response");

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(&resp), "Error creating zip file");
        assert!(bucket.objects().is_empty());
    }

    #[tokio::test]
    async fn upload_failure_is_500_with_s3_message() {
        let web = FakeWeb::new(&[("https://cdn.example/ok.jpg", &b"ok"[..])]);
        let bucket = FakeBucket {
            reject: true,
            ..Default::default()
        };
        let body = br#"{"imageUrls": ["https://cdn.example/ok.jpg"]}"#;

        let resp = zip_images_handler(&settings(SourceMode::Url), &web, &bucket, body)
            .await
            .expect("response");

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(&resp), "Error uploading to S3");
        assert!(!body_text(&resp).contains("AccessDenied"));
    }

    #[tokio::test]
    async fn same_second_requests_land_under_distinct_keys() {
        let bucket = FakeBucket::default();
        let resolver = crate::archive::InlineResolver::default();
        let body = br#"{"images": ["a"]}"#;

        for _ in 0..2 {
            zip_images_handler(&settings(SourceMode::Inline), &resolver, &bucket, body)
                .await
                .expect("response");
        }

        let objects = bucket.objects();
        assert_eq!(objects.len(), 2);
        assert_ne!(objects[0].0, objects[1].0);
    }
}
