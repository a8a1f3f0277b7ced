//! Pipeline orchestration.

use std::path::Path;

use curricula_core::{Error, ParseContext, ParseOptions, ProjectRecord, Result};

use crate::locale::{readme_filename, Lang};
use crate::{dirname::ProjectDirname, document, extract, objectives, thumbnail};

/// Extract a [`ProjectRecord`] from a curriculum project directory.
///
/// Stages run strictly in order — directory name, locale, document load,
/// title, summary, learning objectives, thumbnail — and the first failure
/// aborts the pipeline with no partial record. Invocations for different
/// directories may run concurrently; nothing is shared between them.
pub async fn process(
    dir: impl AsRef<Path>,
    options: &ParseOptions,
    context: &ParseContext,
) -> Result<ProjectRecord> {
    let dir = dir.as_ref();

    let dirname = ProjectDirname::from_path(dir)?;
    let lang = Lang::resolve(&options.locale)?;

    let filename = readme_filename(options.suffix.as_deref());
    tracing::debug!(dir = %dir.display(), %filename, lang = lang.code(), "parsing project");
    let (readme, doc) = document::load(dir, &filename).await?;

    let title = extract::title(&doc, &readme)?;
    let summary = extract::summary(&doc, lang);
    let learning_objectives = objectives::resolve(&doc, options.catalog.as_ref(), &readme)?;

    let client = reqwest::Client::builder().build().map_err(Error::fetch)?;
    let thumb = thumbnail::generate(&client, dir, &doc).await?;

    let slug = match options.suffix.as_deref() {
        Some(suffix) => format!("{}-{suffix}", dirname.slug),
        None => dirname.slug.clone(),
    };
    tracing::info!(%slug, "project parsed");

    Ok(ProjectRecord {
        slug,
        locale: options.locale.clone(),
        track: options.track.clone(),
        repo: options.repo.clone(),
        version: options.version.clone(),
        title,
        summary,
        learning_objectives,
        thumb,
        parser_version: context.parser_version().to_string(),
        created_at: context.now(),
    })
}
