fn main() {
    firstaid_lib::run()
}
