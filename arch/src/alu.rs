use strum::Display;

/// Operation applied to the two topmost stack slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Alu {
    ADD,
    SUB,
    MUL,
    DIV,
    CMPEQ,
    CMPNE,
    CMPGT,
    CMPLT,
    CMPGE,
    CMPLE,
}

impl Alu {
    pub fn is_compare(self) -> bool {
        matches!(
            self,
            Alu::CMPEQ | Alu::CMPNE | Alu::CMPGT | Alu::CMPLT | Alu::CMPGE | Alu::CMPLE
        )
    }
}

#[test]
fn test() {
    assert_eq!(Alu::CMPGE.to_string(), "CMPGE");
    assert_eq!(Alu::DIV.to_string(), "DIV");
    assert!(Alu::CMPLT.is_compare());
    assert!(!Alu::MUL.is_compare());
}
