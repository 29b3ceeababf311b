use forward_list::List;

fn main() {
  let list = List::from_iter(["a", "b", "c"]);

  for item in &list {
    print!("{} ", item);
  }

  print!("\n");
}
