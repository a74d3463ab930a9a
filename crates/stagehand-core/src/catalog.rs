use crate::content;
use crate::entity::{Entity, EntityKind};
use crate::error::{Error, LoadCause};
use std::path::Path;

/// A per-invocation snapshot of every discoverable entity of one kind.
///
/// Rebuilt on every resolution request, never persisted. The default
/// entity is the one named `default.<ext>`; failing that, a sole entity
/// is the default; otherwise there is none.
#[derive(Debug)]
pub struct Catalog {
    kind: EntityKind,
    all: Vec<Entity>,
    def: Option<usize>,
}

impl Catalog {
    /// Enumerate every `*.<ext>` file under `<root>/<dir>`, non-recursive,
    /// and load each one. The batch is atomic: a single unreadable or
    /// unparsable file fails the whole scan. An empty-but-present
    /// directory yields an empty catalog; a missing directory is an
    /// error.
    pub fn scan(kind: EntityKind, root: &Path) -> Result<Self, Error> {
        let dir = root.join(kind.directory());
        if !dir.is_dir() {
            return Err(Error::DirectoryMissing { dir });
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == kind.extension()) {
                files.push((entry.file_name().to_string_lossy().into_owned(), path));
            }
        }
        // Directory listing order is platform-dependent; discovery order
        // is sorted by file name.
        files.sort();

        let mut all = Vec::with_capacity(files.len());
        let mut def = None;
        for (file_name, path) in files {
            if file_name == kind.default_file_name() {
                def = Some(all.len());
            }
            all.push(load_entity(kind, file_name, &path)?);
        }

        if def.is_none() && all.len() == 1 {
            def = Some(0);
        }

        tracing::debug!(kind = %kind, count = all.len(), has_default = def.is_some(), "scanned catalog");

        Ok(Self { kind, all, def })
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn all(&self) -> &[Entity] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// The entity a query-less resolution falls back to, if any.
    pub fn default_entity(&self) -> Option<&Entity> {
        self.def.map(|i| &self.all[i])
    }

    /// Whether `entity` is this catalog's default, compared by canonical
    /// path.
    pub fn is_default(&self, entity: &Entity) -> bool {
        self.default_entity().is_some_and(|d| d.path == entity.path)
    }

    pub(crate) fn default_index(&self) -> Option<usize> {
        self.def
    }

    pub(crate) fn take(mut self, index: usize) -> Entity {
        self.all.swap_remove(index)
    }
}

fn load_entity(kind: EntityKind, file_name: String, path: &Path) -> Result<Entity, Error> {
    let document = content::load(kind, path)?;
    let canonical = path.canonicalize().map_err(|e| Error::Load {
        kind,
        path: path.to_path_buf(),
        cause: LoadCause::Read(e),
    })?;

    Ok(Entity {
        file_name,
        path: canonical,
        name: document.name,
        content: document.content,
    })
}
