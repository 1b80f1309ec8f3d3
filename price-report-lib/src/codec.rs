use bytes::Bytes;
use serde::{Deserialize, Serialize};

pub trait Encode {
    type EncodeError;

    fn encode(message: &Self) -> Result<Bytes, Self::EncodeError>;
}

pub trait Decode {
    type Output;
    type DecodeError;

    fn decode<T: AsRef<[u8]>>(payload: T) -> Result<Self::Output, Self::DecodeError>;
}

impl<T> Encode for T
where
    T: Serialize,
{
    type EncodeError = serde_json::Error;

    fn encode(message: &Self) -> Result<Bytes, Self::EncodeError> {
        let mut payload = serde_json::to_vec_pretty(message)?;
        payload.push(b'\n');
        Ok(payload.into())
    }
}

impl<M> Decode for M
where
    M: for<'a> Deserialize<'a>,
{
    type Output = Self;
    type DecodeError = serde_json::Error;

    fn decode<T: AsRef<[u8]>>(payload: T) -> Result<Self::Output, Self::DecodeError> {
        serde_json::from_slice(payload.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::{Decode, Encode};
    use crate::currency::Toman;

    #[test]
    fn test_encoded_payload_ends_with_newline() {
        let encoded = Toman::encode(&Toman(32_750_000)).unwrap();

        assert_eq!(&encoded[..], b"32750000\n");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(Toman::decode("not a price").is_err());
    }
}
