fn main() {
    rain_catcher::run();
}
