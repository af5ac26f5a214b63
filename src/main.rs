use kolbasa_clicker::components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    // a second init (hot reload) just keeps the existing logger
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("kolbasa clicker starting");
    yew::Renderer::<App>::new().render();
}
