use crate::configs::{ OpenGraph, SiteMetadata, Viewport, FONTS, SITE_METADATA };

#[test]
fn declared_metadata_snapshot() {
    let expected = SiteMetadata {
        title: "Thư mời Lễ Tốt Nghiệp | Minh Anh",
        description: "Trân trọng kính mời bạn đến dự Lễ Tốt Nghiệp của Minh Anh.",
        keywords: vec!["tốt nghiệp", "thư mời", "lễ tốt nghiệp", "graduation", "invitation"],
        author: "Nguyễn Minh Anh",
        open_graph: OpenGraph {
            title: "Thư mời Lễ Tốt Nghiệp | Minh Anh",
            description: "Trân trọng kính mời bạn đến dự Lễ Tốt Nghiệp của Minh Anh.",
            kind: "website",
            locale: "vi_VN",
            site_name: "Minh Anh Graduation",
        },
        viewport: Viewport {
            width: "device-width",
            initial_scale: 1.0,
            maximum_scale: 5.0,
        },
    };
    assert_eq!(*SITE_METADATA, expected);
}

#[test]
fn zoom_is_not_disabled() {
    assert_eq!(SITE_METADATA.viewport.maximum_scale, 5.0);
    assert!(!SITE_METADATA.viewport.content().contains("user-scalable=no"));
}

#[test]
fn two_font_families_with_distinct_variables() {
    assert_eq!(FONTS.len(), 2);
    assert_ne!(FONTS[0].variable, FONTS[1].variable);
}
