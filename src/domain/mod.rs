// Domain layer: core models and ports. Adapters implement the ports against TMDB and Strapi.

pub mod model;
pub mod ports;
