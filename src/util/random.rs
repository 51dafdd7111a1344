use rand::{distributions::Alphanumeric, prelude::ThreadRng, Rng};

use crate::{OrderedMap, Value};

pub trait Random {
    fn gen(rng: &mut ThreadRng) -> Self;
}

const RANDOM_STRING_MIN: usize = 0;
const RANDOM_STRING_MAX: usize = 10;

// nested maps/arrays hold at most this many children
const RANDOM_CONTAINER_MAX: usize = 4;

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for u64 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen()
    }
}

impl Random for Value {
    // get random scalar most of the time, and a shallow container otherwise.
    // floats are quarters so they print and parse back exactly.
    fn gen(rng: &mut ThreadRng) -> Self {
        match rng.gen_range(0..8) {
            0 => Value::Null,
            1 => Value::Bool(rng.gen()),
            2 => Value::Int(rng.gen()),
            3 => Value::Float(rng.gen_range(-4096..4096) as f64 / 4.0),
            4 => {
                let length = rng.gen_range(0..RANDOM_CONTAINER_MAX);
                Value::Array((0..length).map(|_| Value::gen_scalar(rng)).collect())
            }
            5 => {
                let length = rng.gen_range(0..RANDOM_CONTAINER_MAX);
                let mut map = OrderedMap::new();

                for _ in 0..length {
                    map.set(String::gen(rng), Value::gen_scalar(rng));
                }

                Value::Map(map)
            }
            _ => Value::String(String::gen(rng)),
        }
    }
}

impl Value {
    fn gen_scalar(rng: &mut ThreadRng) -> Self {
        match rng.gen_range(0..3) {
            0 => Value::Bool(rng.gen()),
            1 => Value::Int(rng.gen()),
            _ => Value::String(String::gen(rng)),
        }
    }
}
