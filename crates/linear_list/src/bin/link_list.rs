use linear_list::{LinkList, ListError, init_driver_logging};
use tracing::warn;

fn run() -> Result<i32, ListError> {
    let mut list = LinkList::try_new()?;
    list.list_insert(1, 7)?;
    list.list_insert(2, 9)?;
    list.list_delete(1)
}

fn main() {
    init_driver_logging();
    match run() {
        Ok(value) => println!("{value}"),
        Err(err) => {
            warn!(%err, "linked list script failed");
            println!("error");
        }
    }
}
