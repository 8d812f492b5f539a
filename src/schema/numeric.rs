// Concrete scalar schema families
//
// Mechanical instantiations of the generic NumberSchema engine for the
// built-in integer, unsigned, float, byte, and char types.

use crate::schema::NumberSchema;

/// Schema for `i64` values.
pub type IntSchema = NumberSchema<i64>;

/// Schema for `i8` values.
pub type Int8Schema = NumberSchema<i8>;

/// Schema for `i16` values.
pub type Int16Schema = NumberSchema<i16>;

/// Schema for `i32` values.
pub type Int32Schema = NumberSchema<i32>;

/// Schema for `i64` values.
pub type Int64Schema = NumberSchema<i64>;

/// Schema for `u64` values.
pub type UintSchema = NumberSchema<u64>;

/// Schema for `u8` values.
pub type Uint8Schema = NumberSchema<u8>;

/// Schema for `u16` values.
pub type Uint16Schema = NumberSchema<u16>;

/// Schema for `u32` values.
pub type Uint32Schema = NumberSchema<u32>;

/// Schema for `u64` values.
pub type Uint64Schema = NumberSchema<u64>;

/// Schema for `f32` values.
pub type Float32Schema = NumberSchema<f32>;

/// Schema for `f64` values.
pub type Float64Schema = NumberSchema<f64>;

/// Schema for single byte values, an alias of the `u8` family.
pub type ByteSchema = NumberSchema<u8>;

/// Schema for single Unicode scalar values.
pub type CharSchema = NumberSchema<char>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn aliases_share_the_generic_engine() {
        let schema = Int8Schema::new().min(0).max(100).set(101);
        assert!(schema.validate().has_errors());

        let schema = Uint16Schema::new().min(1).set(1);
        assert!(!schema.validate().has_errors());

        let schema = Float64Schema::new().max(1.5).set(1.5);
        assert!(!schema.validate().has_errors());
    }

    #[test]
    fn char_schema_orders_code_points() {
        let schema = CharSchema::new().min('a').max('z').set('q');
        assert!(!schema.validate().has_errors());

        let schema = CharSchema::new().min('a').set('A');
        assert!(schema.validate().has_errors());
    }

    #[test]
    fn byte_schema_round_trip() {
        let schema = ByteSchema::new().set(255);
        let bytes = schema.encode().unwrap();

        let mut fresh = ByteSchema::new();
        fresh.decode(&bytes).unwrap();
        assert_eq!(fresh.value(), Some(&255));
    }
}
