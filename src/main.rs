use anyhow::Context as _;
use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use config::Opt;
use server::{GRAPHQL_PATH, Library, make_app};
use store::RecordStore;

mod config;
mod datamodel;
mod error;
mod server;
mod store;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    let store = if opt.empty {
        RecordStore::default()
    } else {
        RecordStore::seeded()
    };
    let library = Library::new(store);

    if opt.schema {
        println!("{}", library.sdl());
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&opt.log_level).context("could not parse log configuration")?,
        )
        .init();

    let listener = tokio::net::TcpListener::bind(opt.listen)
        .await
        .with_context(|| format!("could not bind to {}", opt.listen))?;
    tracing::info!(
        authors = library.store().authors().len(),
        books = library.store().books().len(),
        "server running at http://{}{}",
        listener.local_addr()?,
        GRAPHQL_PATH,
    );

    axum::serve(listener, make_app(library))
        .await
        .context("server terminated")?;
    Ok(())
}
