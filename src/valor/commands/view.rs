use crate::collection::Collection;
use crate::commands::CmdResult;
use crate::detail::DetailView;
use crate::error::Result;
use crate::images::ImageResolver;

pub fn run(collection: &Collection, id: &str, images: &ImageResolver) -> Result<CmdResult> {
    let record = collection.find(id)?;
    Ok(CmdResult::default().with_detail(DetailView::project(record, images)))
}
