use pocket_ledger::components::App;

fn main() {
    pocket_ledger::init();
    yew::Renderer::<App>::new().render();
}
