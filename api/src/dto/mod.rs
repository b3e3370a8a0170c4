pub mod verification;

pub use verification::{
    AddressDto, CompleteVerificationDto, IndividualDto, StartVerificationDto,
    ValidateVerificationDto,
};
