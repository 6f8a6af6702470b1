use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Serves `rel` from under `root`. Only plain path segments are accepted, so
/// nothing outside `root` can be reached.
pub fn static_file_response(root: &Path, rel: &[&str]) -> ResultResp {
    let path = resolve(root, rel).ok_or(ServerError::NotFound)?;
    let bytes = fs::read(&path).map_err(|_| ServerError::NotFound)?;
    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

fn resolve(root: &Path, rel: &[&str]) -> Option<PathBuf> {
    if rel.is_empty() {
        return None;
    }

    let mut path = root.to_path_buf();
    for segment in rel {
        if segment.is_empty() || segment.contains('\\') {
            return None;
        }
        let mut parts = Path::new(segment).components();
        match (parts.next(), parts.next()) {
            (Some(Component::Normal(part)), None) => path.push(part),
            _ => return None,
        }
    }
    Some(path)
}
