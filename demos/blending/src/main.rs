fn main() -> anyhow::Result<()> {
    fixfn::scenes::blending::run()
}
