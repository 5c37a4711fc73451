use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prefsync::{deserialize, from_str, serialize, to_string, Describe, Result, Synch, Value};

#[derive(Default, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
    active: bool,
}

impl Describe for Product {
    fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
        synch.synch("sku", &mut self.sku)?;
        synch.synch("name", &mut self.name)?;
        synch.synch("price", &mut self.price)?;
        synch.synch("quantity", &mut self.quantity)?;
        synch.synch("active", &mut self.active)?;
        Ok(())
    }
}

#[derive(Default, Clone)]
struct Inventory {
    owner: String,
    featured: Option<Box<Product>>,
    products: Vec<Product>,
}

impl Describe for Inventory {
    fn describe(&mut self, synch: &mut dyn Synch) -> Result<()> {
        synch.synch("owner", &mut self.owner)?;
        synch.synch("featured", &mut self.featured)?;
        synch.synch("products", &mut self.products)?;
        Ok(())
    }
}

fn product(i: u32) -> Product {
    Product {
        sku: format!("SKU{}", i),
        name: format!("Product \"{}\"", i),
        price: 9.99 + f64::from(i),
        quantity: i,
        active: i % 2 == 0,
    }
}

fn inventory(size: u32) -> Inventory {
    Inventory {
        owner: "Ann".to_string(),
        featured: Some(Box::new(product(0))),
        products: (0..size).map(product).collect(),
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let mut item = product(123);

    c.bench_function("serialize_simple_object", |b| {
        b.iter(|| serialize(black_box(&mut item)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let text = serialize(&mut product(123)).unwrap();

    c.bench_function("deserialize_simple_object", |b| {
        b.iter(|| {
            let mut item = Product::default();
            deserialize(&mut item, black_box(&text))
        })
    });
}

fn benchmark_serialize_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_collection");

    for size in [10, 50, 100, 500].iter() {
        let mut data = inventory(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| serialize(black_box(&mut data)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_collection");

    for size in [10, 50, 100, 500].iter() {
        let text = serialize(&mut inventory(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let mut data = Inventory::default();
                deserialize(&mut data, black_box(text))
            })
        });
    }
    group.finish();
}

fn benchmark_value_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_tree");

    let numbers = Value::Array((0..100).map(|i| Value::Num(f64::from(i) * 1.5)).collect());
    let strings = Value::Array(
        (0..100)
            .map(|i| Value::from(format!("line {}\nwith \"quotes\"", i)))
            .collect(),
    );

    group.bench_function("write_numbers", |b| {
        b.iter(|| to_string(black_box(&numbers)))
    });
    group.bench_function("write_strings", |b| {
        b.iter(|| to_string(black_box(&strings)))
    });

    let numbers_text = to_string(&numbers).unwrap();
    let strings_text = to_string(&strings).unwrap();

    group.bench_function("parse_numbers", |b| {
        b.iter(|| from_str(black_box(&numbers_text)))
    });
    group.bench_function("parse_strings", |b| {
        b.iter(|| from_str(black_box(&strings_text)))
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let value = prefsync::to_value(&mut inventory(50)).unwrap();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("prefsync_write", |b| {
        b.iter(|| to_string(black_box(&value)))
    });
    group.bench_function("json_write", |b| {
        b.iter(|| serde_json::to_string(black_box(&value)))
    });

    let text = to_string(&value).unwrap();
    let json = serde_json::to_string(&value).unwrap();

    group.bench_function("prefsync_parse", |b| b.iter(|| from_str(black_box(&text))));
    group.bench_function("json_parse", |b| {
        b.iter(|| serde_json::from_str::<Value>(black_box(&json)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let mut data = inventory(10);

    c.bench_function("roundtrip_inventory", |b| {
        b.iter(|| {
            let text = serialize(black_box(&mut data)).unwrap();
            let mut restored = Inventory::default();
            deserialize(&mut restored, black_box(&text)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_serialize_collection,
    benchmark_deserialize_collection,
    benchmark_value_tree,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
