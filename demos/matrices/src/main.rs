fn main() -> anyhow::Result<()> {
    fixfn::scenes::matrices::run()
}
