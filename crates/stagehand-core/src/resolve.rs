use crate::catalog::Catalog;
use crate::entity::{Entity, EntityKind};
use crate::error::Error;
use std::path::Path;

/// Resolve a user query (or nothing) to exactly one entity.
///
/// Precedence, each step short-circuiting on a match:
///
/// 1. no query: the catalog default, or `NoDefault`;
/// 2. a query that canonicalizes to a cataloged file's path;
/// 3. a file-name match, verbatim or with the kind's extension appended;
/// 4. a declared-name match, exact and case-sensitive.
///
/// File-name matches always beat declared-name matches, even across
/// entities. A path that exists on disk but belongs to no cataloged
/// entity falls through to the name-based steps rather than failing.
pub fn resolve(kind: EntityKind, root: &Path, query: Option<&str>) -> Result<Entity, Error> {
    // The full catalog is built even without a query: default detection
    // needs the whole listing.
    let catalog = Catalog::scan(kind, root)?;

    let Some(query) = query else {
        return match catalog.default_index() {
            Some(index) => Ok(catalog.take(index)),
            None => Err(Error::NoDefault {
                kind,
                dir: root.join(kind.directory()),
                default_file: kind.default_file_name(),
            }),
        };
    };

    if let Ok(canonical) = Path::new(query).canonicalize() {
        if let Some(index) = catalog.all().iter().position(|e| e.path == canonical) {
            tracing::debug!(kind = %kind, query, "resolved by path");
            return Ok(catalog.take(index));
        }
    }

    let with_extension = format!("{query}.{}", kind.extension());
    if let Some(index) = catalog
        .all()
        .iter()
        .position(|e| e.file_name == query || e.file_name == with_extension)
    {
        tracing::debug!(kind = %kind, query, "resolved by file name");
        return Ok(catalog.take(index));
    }

    if let Some(index) = catalog
        .all()
        .iter()
        .position(|e| e.name.as_deref() == Some(query))
    {
        tracing::debug!(kind = %kind, query, "resolved by declared name");
        return Ok(catalog.take(index));
    }

    Err(Error::NotFound { kind })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_play(root: &Path, file_name: &str, contents: &str) -> PathBuf {
        let dir = root.join("plays");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(file_name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn no_query_returns_the_default() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "default.play", "{}");
        write_play(dir.path(), "other.play", "{}");
        let entity = resolve(EntityKind::Play, dir.path(), None).unwrap();
        assert_eq!(entity.file_name, "default.play");
    }

    #[test]
    fn no_query_without_default_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "one.play", "{}");
        write_play(dir.path(), "two.play", "{}");
        let err = resolve(EntityKind::Play, dir.path(), None).unwrap_err();
        assert!(matches!(err, Error::NoDefault { .. }));
        assert!(err.to_string().contains("'default.play' file"));
    }

    #[test]
    fn resolves_by_canonical_path() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "default.play", "{}");
        let path = write_play(dir.path(), "deploy.play", "{}");
        let entity = resolve(
            EntityKind::Play,
            dir.path(),
            Some(path.to_string_lossy().as_ref()),
        )
        .unwrap();
        assert_eq!(entity.file_name, "deploy.play");
    }

    #[test]
    fn existing_but_uncataloged_path_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "real.play", "{}");
        // A real file the catalog never saw (wrong directory and
        // extension). The path step must not fail; the query then misses
        // the name-based steps too.
        let stray = dir.path().join("notes.txt");
        fs::write(&stray, "hello").unwrap();
        let err = resolve(
            EntityKind::Play,
            dir.path(),
            Some(stray.to_string_lossy().as_ref()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn resolves_by_file_name_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "default.play", "{}");
        write_play(dir.path(), "deploy.play", "{}");
        let entity = resolve(EntityKind::Play, dir.path(), Some("deploy")).unwrap();
        assert_eq!(entity.file_name, "deploy.play");
    }

    #[test]
    fn resolves_by_file_name_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "default.play", "{}");
        write_play(dir.path(), "deploy.play", "{}");
        let entity = resolve(EntityKind::Play, dir.path(), Some("deploy.play")).unwrap();
        assert_eq!(entity.file_name, "deploy.play");
    }

    #[test]
    fn resolves_by_declared_name() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "default.play", "{}");
        write_play(dir.path(), "rel.play", "{ name: 'release checklist' }");
        let entity =
            resolve(EntityKind::Play, dir.path(), Some("release checklist")).unwrap();
        assert_eq!(entity.file_name, "rel.play");
    }

    #[test]
    fn declared_name_match_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "default.play", "{}");
        write_play(dir.path(), "rel.play", "{ name: 'Release' }");
        let err = resolve(EntityKind::Play, dir.path(), Some("release")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn file_name_beats_declared_name() {
        let dir = tempfile::tempdir().unwrap();
        // 'alpha.play' declares the name 'beta' and sorts first, but the
        // query matches 'beta.play' by file name, which takes precedence.
        write_play(dir.path(), "alpha.play", "{ name: 'beta' }");
        write_play(dir.path(), "beta.play", "{ name: 'gamma' }");
        write_play(dir.path(), "default.play", "{}");
        let entity = resolve(EntityKind::Play, dir.path(), Some("beta")).unwrap();
        assert_eq!(entity.file_name, "beta.play");
    }

    #[test]
    fn unmatched_query_fails_with_the_generic_message() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "default.play", "{}");
        let err = resolve(EntityKind::Play, dir.path(), Some("non-existent")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find a play matching the given path, file name or name."
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_play(dir.path(), "default.play", "{}");
        write_play(dir.path(), "rel.play", "{ name: 'release' }");
        let first = resolve(EntityKind::Play, dir.path(), Some("release")).unwrap();
        let second = resolve(EntityKind::Play, dir.path(), Some("release")).unwrap();
        assert_eq!(first.file_name, second.file_name);
        assert_eq!(first.path, second.path);
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn acts_resolve_with_their_own_kind() {
        let dir = tempfile::tempdir().unwrap();
        let acts = dir.path().join("acts");
        fs::create_dir_all(&acts).unwrap();
        fs::write(acts.join("warmup.act"), "{}").unwrap();
        fs::write(acts.join("cooldown.act"), "{}").unwrap();

        let entity = resolve(EntityKind::Act, dir.path(), Some("warmup")).unwrap();
        assert_eq!(entity.file_name, "warmup.act");

        let err = resolve(EntityKind::Act, dir.path(), Some("missing")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find an act matching the given path, file name or name."
        );
    }
}
