mod constants;
mod engine;

use crate::engine::core::app_setup::create_app;

fn main() {
    create_app().run();
}
