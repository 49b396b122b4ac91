//! Images with upload metadata read from their extra record.

use serde::Serialize;

use super::{Represent, SerializerContext};
use crate::models::Image;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRepresentation {
    pub source: String,
    pub is_primary: bool,
    pub md5sum: Option<String>,
    pub copyright: Option<String>,
    pub uploading_user: Option<String>,
    pub user_notes: Option<String>,
    pub user_copyright: Option<String>,
    pub notes: Option<String>,
    pub image_url: String,
}

impl Represent for ImageRepresentation {
    type Model = Image;
    const FIELDS: &'static [&'static str] = &[
        "source",
        "is_primary",
        "md5sum",
        "copyright",
        "uploading_user",
        "user_notes",
        "user_copyright",
        "notes",
        "image_url",
    ];

    fn represent(image: &Image, ctx: &SerializerContext<'_>) -> Result<Self> {
        let extra = image.extra.as_ref();

        Ok(Self {
            source: image.source.clone(),
            is_primary: image.is_primary,
            md5sum: extra.map(|e| e.md5sum.clone()),
            copyright: extra.map(|e| e.copyright.clone()),
            uploading_user: extra
                .and_then(|e| e.uploading_user.as_ref())
                .map(|user| user.username.clone()),
            user_notes: extra.map(|e| e.user_notes.clone()),
            user_copyright: extra.map(|e| e.user_copyright.clone()),
            notes: extra.map(|e| e.notes.clone()),
            image_url: ctx.urls.media(&image.image),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageExtra;
    use crate::serializers::test_support::{field_set, keys_of};
    use crate::testing::{request, sample_store};
    use crate::urls::Urls;

    #[test]
    fn test_image_with_extra() {
        let store = sample_store();
        let urls = Urls::default();
        let request = request();
        let ctx = SerializerContext::new(&store, &urls, &request);

        let person = store.person(2009).unwrap();
        let image = &person.extra.as_ref().unwrap().images[0];
        let repr = ImageRepresentation::represent(image, &ctx).unwrap();

        assert_eq!(keys_of(&repr), field_set(ImageRepresentation::FIELDS));
        assert_eq!(repr.md5sum.as_deref(), Some("2d5c0b1f1e2c4f3a9d8e7b6a5c4d3e2f"));
        assert_eq!(repr.uploading_user.as_deref(), Some("mark"));
        assert_eq!(repr.copyright.as_deref(), Some("profile-photo"));
        assert_eq!(repr.image_url, "/media/images/helen-hayes.png");
        assert!(repr.is_primary);
    }

    #[test]
    fn test_image_without_extra_is_null() {
        let store = sample_store();
        let urls = Urls::new("https://media.example.org/");
        let request = request();
        let ctx = SerializerContext::new(&store, &urls, &request);

        let image = Image {
            id: 9,
            source: "Wikipedia".into(),
            is_primary: false,
            image: "images/logo.png".into(),
            extra: None,
        };
        let value = serde_json::to_value(ImageRepresentation::represent(&image, &ctx).unwrap())
            .unwrap();

        for field in ["md5sum", "copyright", "uploading_user", "user_notes", "user_copyright", "notes"] {
            assert!(value[field].is_null(), "{} should be null", field);
        }
        assert_eq!(value["image_url"], "https://media.example.org/images/logo.png");
    }

    #[test]
    fn test_image_without_uploader() {
        let store = sample_store();
        let urls = Urls::default();
        let request = request();
        let ctx = SerializerContext::new(&store, &urls, &request);

        let image = Image {
            id: 10,
            source: String::new(),
            is_primary: false,
            image: "images/x.jpg".into(),
            extra: Some(ImageExtra {
                md5sum: "abc".into(),
                ..ImageExtra::default()
            }),
        };
        let repr = ImageRepresentation::represent(&image, &ctx).unwrap();

        assert_eq!(repr.md5sum.as_deref(), Some("abc"));
        assert_eq!(repr.notes.as_deref(), Some(""));
        assert!(repr.uploading_user.is_none());
    }
}
