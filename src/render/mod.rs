pub(crate) mod background;
pub(crate) mod composite;
pub(crate) mod decorate;
pub(crate) mod encode;
pub(crate) mod fonts;
pub(crate) mod logo;
pub(crate) mod pipeline;
pub(crate) mod text;
