use linear_list::{SqList, init_driver_logging};
use tracing::warn;

const GROWTH: usize = 5;

fn main() {
    init_driver_logging();
    let mut list = SqList::<i32>::new();
    print!("{}", list.capacity());
    if let Err(err) = list.increase_size(GROWTH) {
        warn!(%err, "growing the list failed");
    }
    println!("{}", list.capacity());
}
