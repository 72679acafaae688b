fn main() {
    mini_chess::protocol::run_loop();
}
