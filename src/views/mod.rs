mod invitation;
mod pokemon;
mod shell;

pub use invitation::Invitation;
pub use pokemon::{ partner, Partner, PokemonSkin };
pub use shell::Shell;
