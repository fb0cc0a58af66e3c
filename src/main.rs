mod entry;
mod system;

use loadr::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
