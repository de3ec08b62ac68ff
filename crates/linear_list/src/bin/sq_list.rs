use linear_list::{DEFAULT_CAPACITY, LinearList, ListError, StaticSqList, init_driver_logging};
use tracing::warn;

fn run() -> Result<i32, ListError> {
    let mut list = StaticSqList::<i32, DEFAULT_CAPACITY>::from_slice(&[12, 26, 27, 28, 29])?;
    list.insert(3, 15)?;
    list.delete(3)
}

fn main() {
    init_driver_logging();
    match run() {
        Ok(value) => println!("{value}"),
        Err(err) => {
            warn!(%err, "sequential list script failed");
            println!("error");
        }
    }
}
