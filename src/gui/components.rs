mod asset_list;
mod build_footer;

pub use asset_list::render_asset_list;
pub use build_footer::render_build_footer;
