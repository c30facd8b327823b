fn main() -> anyhow::Result<()> {
    sweeper::log();
    sweeper::driver::run()
}
