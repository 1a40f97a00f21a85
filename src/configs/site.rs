//! Document metadata and web fonts declared by the page shell.

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: &'static str,
    pub initial_scale: f32,
    pub maximum_scale: f32,
}

impl Viewport {
    /// Value of the `<meta name="viewport">` tag. Zoom stays enabled.
    pub fn content(&self) -> String {
        format!(
            "width={}, initial-scale={}, maximum-scale={}",
            self.width,
            self.initial_scale,
            self.maximum_scale
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub locale: &'static str,
    pub site_name: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: Vec<&'static str>,
    pub author: &'static str,
    pub open_graph: OpenGraph,
    pub viewport: Viewport,
}

impl SiteMetadata {
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }

    /// `(property, content)` pairs for the Open Graph meta tags.
    pub fn open_graph_tags(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("og:title", self.open_graph.title),
            ("og:description", self.open_graph.description),
            ("og:type", self.open_graph.kind),
            ("og:locale", self.open_graph.locale),
            ("og:site_name", self.open_graph.site_name)
        ]
    }
}

lazy_static::lazy_static! {
    pub static ref SITE_METADATA: SiteMetadata = SiteMetadata {
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
}

/// A web font family exposed to the page as a CSS custom property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontBinding {
    pub family: &'static str,
    pub variable: &'static str,
    pub weights: &'static [u16],
    pub fallback: &'static str,
}

impl FontBinding {
    pub fn css_stack(&self) -> String {
        format!("'{}', {}", self.family, self.fallback)
    }
}

pub const FONTS: [FontBinding; 2] = [
    FontBinding {
        family: "Playfair Display",
        variable: "--font-display",
        weights: &[400, 700],
        fallback: "serif",
    },
    FontBinding {
        family: "Be Vietnam Pro",
        variable: "--font-body",
        weights: &[400, 600],
        fallback: "system-ui, sans-serif",
    },
];

/// Stylesheet URL loading every font in `FONTS`. `display=swap` keeps the
/// system fallback visible until the font arrives.
pub fn google_fonts_href() -> String {
    let families = FONTS.iter()
        .map(|font| {
            let weights = font.weights
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(";");
            format!("family={}:wght@{}", font.family.replace(' ', "+"), weights)
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("https://fonts.googleapis.com/css2?{}&display=swap", families)
}

/// Inline style binding each font variable for descendants.
pub fn font_variables() -> String {
    FONTS.iter()
        .map(|font| format!("{}: {};", font.variable, font.css_stack()))
        .collect::<Vec<_>>()
        .join(" ")
}
