fn main() -> anyhow::Result<()> {
    fixfn::scenes::sprite::run()
}
