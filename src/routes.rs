use dioxus::prelude::*;
use crate::views::{ Invitation, PokemonSkin, Shell };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Invitation,
    #[route("/pokemon")]
    PokemonSkin,
}
