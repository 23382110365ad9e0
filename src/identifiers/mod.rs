/*! Street-name language identification.

Montreal street names read either as English (qualifier at the end:
"Sherbrooke Street West") or as French (qualifier at the start:
"Rue Saint Denis"), or as both, or as neither. The two checks are
deliberately independent: the street normalizer treats them as ordered
hints, not a partition.
!*/
mod street;

pub use street::StreetClassifier;
