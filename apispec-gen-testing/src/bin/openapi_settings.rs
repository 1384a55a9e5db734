use apispec_gen::DocumentConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let (project, settings) = apispec_gen_testing::openapi_settings()?;
    log::info!(
        "openapi document goes to {}",
        settings.openapi.output_file(&project).display()
    );
    log::info!(
        "openapi3 document goes to {}",
        settings.openapi3.output_file(&project).display()
    );
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
