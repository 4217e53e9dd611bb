mod html;
mod registry;
mod views;
