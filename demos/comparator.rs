use cskl::{Builder, Comparator, Height};

/// A user record, ordered by `id` only.
#[derive(Debug)]
struct Person {
  id: u32,
  name: String,
}

/// Orders people by id, the name is payload.
struct ById;

impl Comparator<Person> for ById {
  fn less(&self, a: &Person, b: &Person) -> bool {
    a.id < b.id
  }
}

fn main() {
  let people = Builder::new()
    .with_max_level(Height::try_new(6).unwrap())
    .with_comparator(ById)
    .build::<Person>();

  people
    .insert(Person {
      id: 2,
      name: "Bob".to_string(),
    })
    .unwrap();
  people
    .insert(Person {
      id: 1,
      name: "Alice".to_string(),
    })
    .unwrap();

  // same id, different name: rejected, the first one stays
  let err = people
    .insert(Person {
      id: 1,
      name: "Mallory".to_string(),
    })
    .unwrap_err();
  println!("{err}");

  let probe = Person {
    id: 1,
    name: String::new(),
  };
  assert_eq!(people.get(&probe).unwrap().name, "Alice");

  for p in &people {
    println!("{} {}", p.id, p.name);
  }
}
