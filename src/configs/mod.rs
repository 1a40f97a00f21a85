mod env_validate;
mod invitation;
mod site;

pub use env_validate::{ theme_file_path, THEME_FILE_ENV };
pub use invitation::{ countdown, Countdown, InvitationDetails, INVITATION };
pub use site::{
    font_variables,
    google_fonts_href,
    FontBinding,
    OpenGraph,
    SiteMetadata,
    Viewport,
    FONTS,
    SITE_METADATA,
};
