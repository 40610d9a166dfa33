fn main() {
    scan_fixtures::app::startup::startup();
}
