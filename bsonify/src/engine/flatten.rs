use crate::document::Document;
use crate::engine::dump::render_kind;
use crate::engine::fields::children;
use crate::errors::BsonResult;
use crate::inspect::{Inspect, Kind};
use itertools::Itertools;
use smallvec::SmallVec;

type Path<'a> = SmallVec<[&'a str; 8]>;

/// Renders a composite value as a single-level document whose keys are the
/// paths to each leaf, joined with `separator`.
///
/// Composite children are flattened into the same document instead of being
/// nested. Set indirections add no path segment; unset ones and leaves end
/// a path.
pub(crate) fn flatten(kind: Kind<'_>, separator: &str) -> BsonResult<Document> {
    let mut flattener = PathFlattener {
        separator,
        path: Path::new(),
        result: Document::new(),
    };
    flattener.visit(kind)?;
    Ok(flattener.result)
}

struct PathFlattener<'a, 's> {
    separator: &'s str,
    path: Path<'a>,
    result: Document,
}

impl<'a> PathFlattener<'a, '_> {
    fn visit(&mut self, kind: Kind<'a>) -> BsonResult<()> {
        for child in children(kind)? {
            self.add(child.name, child.value)?;
        }
        Ok(())
    }

    fn add(&mut self, name: &'a str, value: &'a dyn Inspect) -> BsonResult<()> {
        match value.kind() {
            Kind::Indirection(None) => {
                let key = self.key(name);
                self.result.push(key, value.unset());
            }
            Kind::Indirection(Some(inner)) => self.add(name, inner)?,
            kind if kind.is_composite() => {
                self.path.push(name);
                let visited = self.visit(kind);
                self.path.pop();
                visited?;
            }
            leaf => {
                let key = self.key(name);
                self.result.push(key, render_kind(value, leaf)?);
            }
        }
        Ok(())
    }

    fn key(&self, name: &str) -> String {
        self.path
            .iter()
            .copied()
            .chain(std::iter::once(name))
            .join(self.separator)
    }
}
