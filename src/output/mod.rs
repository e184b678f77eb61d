mod report;

pub use report::{
    emit, render_batch_json, render_batch_markdown, render_brainstorm_json,
    render_brainstorm_markdown,
};
