use pantry::catalog::popular_categories;

pub(crate) fn run() -> Result<(), String> {
    for category in popular_categories() {
        println!("{category}");
    }

    Ok(())
}
